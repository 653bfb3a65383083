pub mod class_schedule;
pub mod group;
pub mod rating;
pub mod student;
pub mod student_teacher;
pub mod subject;
pub mod teacher;
pub mod teacher_group;
pub mod user;
pub mod weekly_schedule;

/// `"{last} {first} {middle}"` with the middle name dropped when absent or blank.
pub fn full_name(last_name: &str, first_name: &str, middle_name: Option<&str>) -> String {
    let mut name = format!("{} {}", last_name.trim(), first_name.trim());
    if let Some(middle) = middle_name.map(str::trim).filter(|m| !m.is_empty()) {
        name.push(' ');
        name.push_str(middle);
    }
    name.trim().to_string()
}

/// `"{last} {F}."`, used as the public author of a non-anonymous review.
pub fn short_name(last_name: &str, first_name: &str) -> String {
    match first_name.trim().chars().next() {
        Some(initial) => format!("{} {}.", last_name.trim(), initial),
        None => last_name.trim().to_string(),
    }
}
