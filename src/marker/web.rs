/// Browser futures hold JS handles and never leave the main thread, so no bound applies.
pub trait MaybeSend {}
impl<T> MaybeSend for T {}
