pub mod dashboard;
pub mod jobs;
pub mod navigation;
pub mod posting;
