use crate::seed::Seeder;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use sea_orm::DatabaseConnection;
use services::{
    ServiceError,
    group::GroupService,
    subject::SubjectService,
    teacher::TeacherService,
    weekly_schedule::{WeeklyClassInput, WeeklyScheduleInput, WeeklyScheduleService},
};

const WEEKS: [u32; 2] = [36, 37];
const CLASS_TYPES: [&str; 3] = ["lecture", "seminar", "lab"];
const CLASSROOMS: [&str; 5] = ["А-101", "А-204", "Б-310", "Б-112", "В-020"];

pub struct ScheduleSeeder;

#[async_trait::async_trait]
impl Seeder for ScheduleSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let mut rng = StdRng::from_entropy();
        let subjects: Vec<i64> = SubjectService::list(db).await?.into_iter().map(|s| s.id).collect();
        if subjects.is_empty() {
            return Ok(());
        }
        let existing = WeeklyScheduleService::list(db).await?;

        for group in GroupService::list(db).await? {
            let teachers: Vec<String> = TeacherService::by_group(db, &group.group_number)
                .await?
                .into_iter()
                .map(|t| t.full_name)
                .collect();
            if teachers.is_empty() {
                continue;
            }

            for week in WEEKS {
                let taken = existing
                    .iter()
                    .any(|w| w.group_number == group.group_number && w.week_number == week as i32);
                if taken {
                    continue;
                }

                let Some(monday) = NaiveDate::from_isoywd_opt(2025, week, Weekday::Mon) else {
                    continue;
                };
                let mut classes = Vec::new();
                for offset in 0..5 {
                    let date = monday + Duration::days(offset);
                    let pairs = rng.gen_range(2..=4);
                    for pair_number in 1..=pairs {
                        classes.push(WeeklyClassInput {
                            subject_id: *subjects.choose(&mut rng).unwrap_or(&subjects[0]),
                            date,
                            day_of_week: Some(date.weekday().number_from_monday() as i32),
                            pair_number,
                            classroom: CLASSROOMS.choose(&mut rng).unwrap_or(&CLASSROOMS[0]).to_string(),
                            class_type: CLASS_TYPES.choose(&mut rng).unwrap_or(&CLASS_TYPES[0]).to_string(),
                            teacher_name: teachers.choose(&mut rng).unwrap_or(&teachers[0]).clone(),
                        });
                    }
                }

                WeeklyScheduleService::create(
                    db,
                    WeeklyScheduleInput {
                        group_number: group.group_number.clone(),
                        week_number: week as i32,
                        classes,
                    },
                )
                .await?;
            }
        }
        Ok(())
    }
}
