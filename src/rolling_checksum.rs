pub mod rolling_adler32;

pub trait RollingChecksum {
    type ChecksumType;

    fn new(initial_window: &[u8]) -> Self;
    fn checksum(&self) -> Self::ChecksumType;

    fn push_byte(&mut self, new_byte: u8);
    fn pop_byte(&mut self, old_byte: u8, bytes_ago: usize);

    /// Drops `old_byte` from the front of the window and appends `new_byte`, keeping the length
    fn slide_window(&mut self, old_byte: u8, new_byte: u8);
}
