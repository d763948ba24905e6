pub mod work_day;
pub mod workspace;
