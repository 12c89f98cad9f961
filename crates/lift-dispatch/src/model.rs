//! The `Dispatcher` trait — the extension point for dispatch policies.

use crate::{DispatchContext, Leg};

/// Pluggable dispatch policy.
///
/// Called once per decision cycle, after the harness has let passengers off
/// and on at the car's floor.  Everything a policy needs is in the
/// [`DispatchContext`]; state that must persist between cycles (such as a
/// sweep direction) lives on the [`Car`][crate::Car], not in the policy.
///
/// # Thread safety
///
/// Series checkpoints may run in parallel via Rayon, so implementations must
/// be `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysTop;
///
/// impl Dispatcher for AlwaysTop {
///     fn name(&self) -> &'static str { "always-top" }
///
///     fn plan(&self, ctx: &DispatchContext<'_>) -> Leg {
///         Leg::TravelTo(ctx.building.top())
///     }
/// }
/// ```
pub trait Dispatcher: Send + Sync + 'static {
    /// Short stable name used in logs and output files.
    fn name(&self) -> &'static str;

    /// Decide the car's next movement.
    fn plan(&self, ctx: &DispatchContext<'_>) -> Leg;
}
