//! Delegation boilerplate for modules built around a `ModuleCore`.

/// Implement `PoweredDevice` for a type with a `core: ModuleCore` field.
///
/// ```ignore
/// powered_module!(Printer);
/// ```
macro_rules! powered_module {
    ($name:ident) => {
        impl $crate::module::PoweredDevice for $name {
            fn state(&self) -> $crate::core::OperatingState {
                self.core.state()
            }

            fn set_state(&mut self, state: $crate::core::OperatingState) {
                self.core.set_state(state);
            }

            fn power_on(&mut self) {
                self.core.power_on();
            }

            fn power_off(&mut self) {
                self.core.power_off();
            }

            fn standby_on(&mut self) {
                self.core.standby_on();
            }

            fn standby_off(&mut self) {
                self.core.standby_off();
            }

            fn counter(&self) -> u64 {
                self.core.activation_count()
            }
        }

        impl $name {
            /// State, counters and history of this module.
            pub fn core(&self) -> &$crate::module::ModuleCore {
                &self.core
            }

            pub(crate) fn core_mut(&mut self) -> &mut $crate::module::ModuleCore {
                &mut self.core
            }
        }
    };
}
