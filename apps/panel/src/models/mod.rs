pub mod assessment;
pub mod profile;
pub mod resume_file;

pub use assessment::{AssessmentDetails, AssessmentEvent, AssessmentResult};
pub use profile::{Profile, SkillScore};
pub use resume_file::ResumeFile;
