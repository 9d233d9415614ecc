mod course_law;
mod flight_director;
mod pid;

pub use course_law::{CourseLaw, CourseLawBranch};
pub use flight_director::{FlightDirector, FlightDirectorOutput};
pub use pid::Pid;
