//! Permission boundary. The host application owns the actual permission
//! prompt flow; this crate only asks whether media read access is currently
//! held and signals the host when a scan was refused for lack of it.

/// Answers whether the process may read the device media collections.
pub trait AccessPolicy {
    fn media_read_granted(&self) -> bool;

    /// Ask the host layer to start its permission-request flow. Fired once
    /// per refused scan. Must not block; the scan fails regardless and the
    /// caller re-invokes it after a grant.
    fn request_media_read(&self) {}
}

/// Policy for hosts that establish access before constructing the scanner.
#[derive(Debug, Clone, Copy, Default)]
pub struct Granted;

impl AccessPolicy for Granted {
    fn media_read_granted(&self) -> bool {
        true
    }
}
