//=========================================================================
// Native Engine Entry Points
//=========================================================================
//
// The frame-driven simulation this crate feeds. Game state, physics and
// rendering live behind this trait; the bridge only sequences the calls.
//
// Every method is invoked on the render thread, in the order the
// corresponding commands were pushed.
//
//=========================================================================

/// Entry points of the native simulation/rendering engine.
///
/// Pointer ids are forwarded exactly as reported by the platform; an
/// `on_pointer_up` for an id that was never pressed is passed through
/// unchanged. Validating pointer state is up to the implementor.
pub trait NativeEngine: Send + 'static {
    /// Graphics context is ready; (re)create GPU resources.
    fn on_surface_created(&mut self);

    /// Drawable size in pixels (always positive).
    fn on_surface_resized(&mut self, width: u32, height: u32);

    /// Advance the simulation and draw one frame.
    fn on_frame_update(&mut self);

    fn on_pointer_down(&mut self, id: u32, x: f32, y: f32);

    fn on_pointer_up(&mut self, id: u32, x: f32, y: f32);

    fn on_pointer_move(&mut self, id: u32, x: f32, y: f32);

    fn on_pause(&mut self);

    fn on_resume(&mut self);
}

impl<E: NativeEngine + ?Sized> NativeEngine for Box<E> {
    fn on_surface_created(&mut self) {
        (**self).on_surface_created()
    }

    fn on_surface_resized(&mut self, width: u32, height: u32) {
        (**self).on_surface_resized(width, height)
    }

    fn on_frame_update(&mut self) {
        (**self).on_frame_update()
    }

    fn on_pointer_down(&mut self, id: u32, x: f32, y: f32) {
        (**self).on_pointer_down(id, x, y)
    }

    fn on_pointer_up(&mut self, id: u32, x: f32, y: f32) {
        (**self).on_pointer_up(id, x, y)
    }

    fn on_pointer_move(&mut self, id: u32, x: f32, y: f32) {
        (**self).on_pointer_move(id, x, y)
    }

    fn on_pause(&mut self) {
        (**self).on_pause()
    }

    fn on_resume(&mut self) {
        (**self).on_resume()
    }
}
