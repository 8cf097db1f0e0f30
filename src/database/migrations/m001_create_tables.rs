use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create events table
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Events::Title).text().not_null())
                    .col(ColumnDef::new(Events::Description).text().not_null())
                    .col(
                        ColumnDef::new(Events::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Events::Location).text().not_null())
                    .col(ColumnDef::new(Events::Producer).text())
                    .col(ColumnDef::new(Events::MaxParticipants).integer())
                    .col(
                        ColumnDef::new(Events::CurrentParticipants)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Events::Status)
                            .text()
                            .not_null()
                            .default("draft"),
                    )
                    .col(ColumnDef::new(Events::Banner).text())
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Events::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sponsors table
        manager
            .create_table(
                Table::create()
                    .table(Sponsors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sponsors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sponsors::EventId).integer().not_null())
                    .col(ColumnDef::new(Sponsors::Company).text().not_null())
                    .col(ColumnDef::new(Sponsors::Logo).text())
                    .col(ColumnDef::new(Sponsors::Participant).text().not_null())
                    .col(
                        ColumnDef::new(Sponsors::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Sponsors::Status)
                            .text()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Sponsors::DisplayedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Sponsors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sponsors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sponsors_event_id")
                            .from(Sponsors::Table, Sponsors::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Sponsors are read per-event in display order
        manager
            .create_index(
                Index::create()
                    .name("idx_sponsors_event_display_order")
                    .table(Sponsors::Table)
                    .col(Sponsors::EventId)
                    .col(Sponsors::DisplayOrder)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_status")
                    .table(Events::Table)
                    .col(Events::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sponsors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Events {
    Table,
    Id,
    Title,
    Description,
    Date,
    Location,
    Producer,
    MaxParticipants,
    CurrentParticipants,
    Status,
    Banner,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Sponsors {
    Table,
    Id,
    EventId,
    Company,
    Logo,
    Participant,
    DisplayOrder,
    Status,
    DisplayedAt,
    CreatedAt,
    UpdatedAt,
}
