use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510010011_seed_reference_data"
    }
}

const GROUPS: [(i64, &str); 3] = [(1, "АС-22-04"), (2, "АС-22-05"), (3, "АА-22-07")];

/// (id, first, last, middle)
const TEACHERS: [(i64, &str, &str, &str); 3] = [
    (1, "Татьяна", "Михайлова", "Папилина"),
    (2, "Антон", "Тупысев", "Михайлович"),
    (3, "Александр", "Асирян", "Вячеславович"),
];

/// (id, first, last, middle, group_id)
const STUDENTS: [(i64, &str, &str, &str, i64); 6] = [
    (1, "Екатерина", "Михайлова", "Сергеевна", 1),
    (2, "Екатерина", "Ткачева", "Дмитриевна", 1),
    (3, "Никита", "Клейменов", "Игоревич", 1),
    (4, "Иван", "Иванов", "Иванович", 2),
    (5, "Просковья", "Простова", "Петровна", 2),
    (6, "Геннадий", "Громов", "Васильевич", 3),
];

/// (id, teacher_id, group_id)
const TEACHER_GROUPS: [(i64, i64, i64); 5] = [(1, 1, 1), (2, 2, 1), (3, 2, 2), (4, 2, 3), (5, 3, 3)];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut groups = Query::insert();
        groups
            .into_table(Alias::new("groups"))
            .columns([Alias::new("id"), Alias::new("group_number")]);
        for (id, number) in GROUPS {
            groups.values_panic([id.into(), number.into()]);
        }
        manager.exec_stmt(groups).await?;

        let mut teachers = Query::insert();
        teachers.into_table(Alias::new("teachers")).columns([
            Alias::new("id"),
            Alias::new("first_name"),
            Alias::new("last_name"),
            Alias::new("middle_name"),
        ]);
        for (id, first, last, middle) in TEACHERS {
            teachers.values_panic([id.into(), first.into(), last.into(), middle.into()]);
        }
        manager.exec_stmt(teachers).await?;

        let mut students = Query::insert();
        students.into_table(Alias::new("students")).columns([
            Alias::new("id"),
            Alias::new("first_name"),
            Alias::new("last_name"),
            Alias::new("middle_name"),
            Alias::new("group_id"),
        ]);
        for (id, first, last, middle, group_id) in STUDENTS {
            students.values_panic([
                id.into(),
                first.into(),
                last.into(),
                middle.into(),
                group_id.into(),
            ]);
        }
        manager.exec_stmt(students).await?;

        let mut links = Query::insert();
        links.into_table(Alias::new("teacher_groups")).columns([
            Alias::new("id"),
            Alias::new("teacher_id"),
            Alias::new("group_id"),
        ]);
        for (id, teacher_id, group_id) in TEACHER_GROUPS {
            links.values_panic([id.into(), teacher_id.into(), group_id.into()]);
        }
        manager.exec_stmt(links).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, ids) in [
            ("teacher_groups", TEACHER_GROUPS.iter().map(|t| t.0).collect::<Vec<_>>()),
            ("students", STUDENTS.iter().map(|s| s.0).collect()),
            ("teachers", TEACHERS.iter().map(|t| t.0).collect()),
            ("groups", GROUPS.iter().map(|g| g.0).collect()),
        ] {
            manager
                .exec_stmt(
                    Query::delete()
                        .from_table(Alias::new(table))
                        .and_where(Expr::col(Alias::new("id")).is_in(ids))
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }
}
