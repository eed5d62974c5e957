use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Mentorship {
    Table,
    Id,
    MentorId,
    MenteeId,
    MentorshipType,
    Status,
    RequestMessage,
    ResponseMessage,
    Notes,
    MeetingFrequency,
    RequestedAt,
    RespondedAt,
    StartedAt,
    CompletedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Mentorship::Table)
                .if_not_exists()
                .col(ColumnDef::new(Mentorship::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Mentorship::MentorId).uuid().not_null())
                .col(ColumnDef::new(Mentorship::MenteeId).uuid().not_null())
                .col(ColumnDef::new(Mentorship::MentorshipType).string_len(20).not_null())
                .col(ColumnDef::new(Mentorship::Status).string_len(20).not_null())
                .col(ColumnDef::new(Mentorship::RequestMessage).text().null())
                .col(ColumnDef::new(Mentorship::ResponseMessage).text().null())
                .col(ColumnDef::new(Mentorship::Notes).text().null())
                .col(ColumnDef::new(Mentorship::MeetingFrequency).string().null())
                .col(ColumnDef::new(Mentorship::RequestedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Mentorship::RespondedAt).timestamp_with_time_zone().null())
                .col(ColumnDef::new(Mentorship::StartedAt).timestamp_with_time_zone().null())
                .col(ColumnDef::new(Mentorship::CompletedAt).timestamp_with_time_zone().null())
                .col(ColumnDef::new(Mentorship::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(Mentorship::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_mentorship_mentor")
                        .from_tbl(Mentorship::Table)
                        .from_col(Mentorship::MentorId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_mentorship_mentee")
                        .from_tbl(Mentorship::Table)
                        .from_col(Mentorship::MenteeId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_mentorship_mentor")
                .table(Mentorship::Table)
                .col(Mentorship::MentorId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_mentorship_mentee")
                .table(Mentorship::Table)
                .col(Mentorship::MenteeId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_mentorship_status")
                .table(Mentorship::Table)
                .col(Mentorship::Status)
                .to_owned(),
        ).await?;

        // A speaker cannot mentor themselves, and a pair (either ordering)
        // gets at most one open record. The partial unique index backstops
        // the check-then-insert in the workflow against concurrent requests.
        m.get_connection().execute_unprepared(
            r#"
            ALTER TABLE mentorship
                ADD CONSTRAINT chk_mentorship_distinct_parties CHECK (mentor_id <> mentee_id);
            "#,
        ).await?;

        m.get_connection().execute_unprepared(
            r#"
            CREATE UNIQUE INDEX uniq_mentorship_open_pair
                ON mentorship (LEAST(mentor_id, mentee_id), GREATEST(mentor_id, mentee_id))
                WHERE status IN ('pending', 'active');
            "#,
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Mentorship::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
