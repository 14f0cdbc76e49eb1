/// Identifies one granted animation frame, so a pending request can be
/// cancelled before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host-supplied per-frame scheduling primitive (requestAnimationFrame-like).
///
/// The host must deliver exactly one frame callback per granted handle,
/// unless the handle is cancelled first. The motion controller never holds
/// more than one outstanding handle.
pub trait FrameScheduler {
    fn schedule(&mut self) -> FrameHandle;
    fn cancel(&mut self, handle: FrameHandle);
}
