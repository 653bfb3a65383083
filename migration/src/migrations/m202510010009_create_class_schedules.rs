use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510010009_create_class_schedules"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("class_schedules"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("subject_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("date")).date().not_null())
                    .col(ColumnDef::new(Alias::new("day_of_week")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("pair_number")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("classroom")).string_len(50).not_null())
                    .col(ColumnDef::new(Alias::new("group_number")).string_len(16).not_null())
                    .col(ColumnDef::new(Alias::new("class_type")).string_len(50).not_null())
                    .col(ColumnDef::new(Alias::new("teacher_name")).string_len(200).not_null())
                    .col(ColumnDef::new(Alias::new("weekly_schedule_id")).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("class_schedules"), Alias::new("subject_id"))
                            .to(Alias::new("subjects"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("class_schedules"), Alias::new("weekly_schedule_id"))
                            .to(Alias::new("weekly_schedules"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_schedules_group_date")
                    .table(Alias::new("class_schedules"))
                    .col(Alias::new("group_number"))
                    .col(Alias::new("date"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("class_schedules")).to_owned())
            .await
    }
}
