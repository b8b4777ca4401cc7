use core::ops::{Deref, DerefMut};

use super::{DrawingSurface, Shadow, SurfaceState};

/// Saved surface state, restored when the guard drops.
///
/// Derefs to the surface, so draws go through the guard:
///
/// ```
/// # use handreplay_engine::paint::Color;
/// # use handreplay_engine::scene::DrawList;
/// # use handreplay_engine::surface::{save, DrawingSurface};
/// let mut surface = DrawList::new();
/// {
///     let mut s = save(&mut surface);
///     s.set_fill_color(Color::RED);
/// }
/// assert_eq!(surface.state().fill_color, Color::BLACK);
/// ```
pub struct StateGuard<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
    saved: Option<SurfaceState>,
}

/// Snapshots the full surface state; the snapshot is restored on drop.
pub fn save<S: DrawingSurface + ?Sized>(surface: &mut S) -> StateGuard<'_, S> {
    let saved = Some(surface.state().clone());
    StateGuard { surface, saved }
}

impl<S: DrawingSurface + ?Sized> Deref for StateGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> DerefMut for StateGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> Drop for StateGuard<'_, S> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            *self.surface.state_mut() = saved;
        }
    }
}

/// Active shadow; on drop the shadow is reset to zero offset and blur.
pub struct ShadowScope<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
}

/// Sets `shadow` for the lifetime of the returned scope.
pub fn with_shadow_scope<S: DrawingSurface + ?Sized>(surface: &mut S, shadow: Shadow) -> ShadowScope<'_, S> {
    surface.set_shadow(shadow);
    ShadowScope { surface }
}

impl<S: DrawingSurface + ?Sized> Deref for ShadowScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> DerefMut for ShadowScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> Drop for ShadowScope<'_, S> {
    fn drop(&mut self) {
        let cleared = self.surface.state().shadow.cleared();
        self.surface.set_shadow(cleared);
    }
}

/// Runs `draw` with the state saved beforehand and restored afterwards.
pub fn with_saved_state<S, R>(surface: &mut S, draw: impl FnOnce(&mut S) -> R) -> R
where
    S: DrawingSurface + ?Sized,
{
    let mut guard = save(surface);
    draw(&mut *guard)
}

/// Runs `draw` under `shadow`, then resets the shadow.
pub fn with_shadow<S, R>(surface: &mut S, shadow: Shadow, draw: impl FnOnce(&mut S) -> R) -> R
where
    S: DrawingSurface + ?Sized,
{
    let mut scope = with_shadow_scope(surface, shadow);
    draw(&mut *scope)
}
