pub mod filesystem;
pub mod system_clock;

pub use filesystem::FilesystemArtifactStore;
pub use system_clock::SystemClock;
