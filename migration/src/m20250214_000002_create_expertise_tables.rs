use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ExpertiseArea {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserExpertiseArea {
    Table,
    UserId,
    ExpertiseAreaId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(ExpertiseArea::Table)
                .if_not_exists()
                .col(ColumnDef::new(ExpertiseArea::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(ExpertiseArea::Name).string().not_null())
                .col(ColumnDef::new(ExpertiseArea::CreatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        // Join table: which expertise topics a speaker claims
        m.create_table(
            Table::create()
                .table(UserExpertiseArea::Table)
                .if_not_exists()
                .col(ColumnDef::new(UserExpertiseArea::UserId).uuid().not_null())
                .col(ColumnDef::new(UserExpertiseArea::ExpertiseAreaId).uuid().not_null())
                .col(ColumnDef::new(UserExpertiseArea::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .primary_key(
                    Index::create()
                        .name("pk_user_expertise_area")
                        .col(UserExpertiseArea::UserId)
                        .col(UserExpertiseArea::ExpertiseAreaId)
                )
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(UserExpertiseArea::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_user_expertise_area_user")
                        .from_tbl(UserExpertiseArea::Table)
                        .from_col(UserExpertiseArea::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_user_expertise_area_area")
                        .from_tbl(UserExpertiseArea::Table)
                        .from_col(UserExpertiseArea::ExpertiseAreaId)
                        .to_tbl(ExpertiseArea::Table)
                        .to_col(ExpertiseArea::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_user_expertise_area_user")
                .table(UserExpertiseArea::Table)
                .col(UserExpertiseArea::UserId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_user_expertise_area_area")
                .table(UserExpertiseArea::Table)
                .col(UserExpertiseArea::ExpertiseAreaId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(UserExpertiseArea::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(ExpertiseArea::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
