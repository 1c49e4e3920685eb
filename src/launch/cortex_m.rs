use crate::{LaunchVector, launch::Handoff};

/// Handoff for Cortex-M without TrustZone: load MSP and branch, both from
/// assembly so the old stack is never touched after the switch.
pub struct CortexM;

impl Handoff for CortexM {
    unsafe fn transfer(self, vector: LaunchVector) -> ! {
        unsafe {
            cortex_m::asm::bootstrap(
                vector.initial_stack_pointer as *const u32,
                vector.entry_point as *const u32,
            )
        }
    }
}
