/// Read futures may be moved to another worker thread, so they must be [`Send`].
pub trait MaybeSend: Send {}
impl<T> MaybeSend for T where T: Send {}
