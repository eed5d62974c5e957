use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Mentorship {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ExpertiseArea {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum MentorshipFocusArea {
    Table,
    MentorshipId,
    ExpertiseAreaId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Join table: which expertise topics a mentorship request is scoped to
        m.create_table(
            Table::create()
                .table(MentorshipFocusArea::Table)
                .if_not_exists()
                .col(ColumnDef::new(MentorshipFocusArea::MentorshipId).uuid().not_null())
                .col(ColumnDef::new(MentorshipFocusArea::ExpertiseAreaId).uuid().not_null())
                .col(ColumnDef::new(MentorshipFocusArea::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .primary_key(
                    Index::create()
                        .name("pk_mentorship_focus_area")
                        .col(MentorshipFocusArea::MentorshipId)
                        .col(MentorshipFocusArea::ExpertiseAreaId)
                )
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(MentorshipFocusArea::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_mentorship_focus_area_mentorship")
                        .from_tbl(MentorshipFocusArea::Table)
                        .from_col(MentorshipFocusArea::MentorshipId)
                        .to_tbl(Mentorship::Table)
                        .to_col(Mentorship::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_mentorship_focus_area_area")
                        .from_tbl(MentorshipFocusArea::Table)
                        .from_col(MentorshipFocusArea::ExpertiseAreaId)
                        .to_tbl(ExpertiseArea::Table)
                        .to_col(ExpertiseArea::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_mentorship_focus_area_mentorship")
                .table(MentorshipFocusArea::Table)
                .col(MentorshipFocusArea::MentorshipId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_mentorship_focus_area_area")
                .table(MentorshipFocusArea::Table)
                .col(MentorshipFocusArea::ExpertiseAreaId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(MentorshipFocusArea::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
