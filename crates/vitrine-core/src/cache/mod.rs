// ── Local content cache backends ──

mod file;
mod memory;

pub use file::FileCache;
pub use memory::MemoryCache;
