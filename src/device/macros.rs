//! Delegation boilerplate for composite devices.

/// Implement the shared power/print/scan surface for a type wrapping a
/// `Coordinator` in field `inner`.
macro_rules! coordinated_device {
    ($name:ident) => {
        impl $crate::module::PoweredDevice for $name {
            /// Standby while manual standby is set, On only when every
            /// module is on, Off otherwise.
            fn state(&self) -> $crate::core::OperatingState {
                self.inner.state()
            }

            fn set_state(&mut self, state: $crate::core::OperatingState) {
                self.inner.set_state(state);
            }

            fn power_on(&mut self) {
                self.inner.power_on();
            }

            fn power_off(&mut self) {
                self.inner.power_off();
            }

            fn standby_on(&mut self) {
                self.inner.standby_on();
            }

            fn standby_off(&mut self) {
                self.inner.standby_off();
            }

            fn counter(&self) -> u64 {
                self.inner.counter()
            }
        }

        impl $crate::module::PrintCapable for $name {
            fn print(&mut self, document: &$crate::document::Document) {
                self.inner.print(document);
            }

            fn print_counter(&self) -> u64 {
                self.inner.print_counter()
            }
        }

        impl $crate::module::ScanCapable for $name {
            fn scan(
                &mut self,
                format: $crate::document::DocumentFormat,
            ) -> Option<$crate::document::Document> {
                self.inner.scan(format)
            }

            fn scan_counter(&self) -> u64 {
                self.inner.scan_counter()
            }
        }

        impl $name {
            /// Scan an image and print it straight away.
            ///
            /// Returns the scanned document; `None` means the scan was
            /// refused and nothing was printed.
            pub fn scan_and_print(&mut self) -> Option<$crate::document::Document> {
                self.inner.scan_and_print()
            }

            pub fn is_manual_standby(&self) -> bool {
                self.inner.is_manual_standby()
            }

            pub fn report(&self) -> $crate::device::DeviceReport {
                self.inner.report()
            }

            pub fn snapshot(&self) -> $crate::device::DeviceSnapshot {
                self.inner.snapshot()
            }

            /// Check the coordination invariants, reporting every violation.
            pub fn audit(&self) -> $crate::audit::AuditResult {
                $crate::audit::AuditRules::standard().enforce(&self.inner.snapshot())
            }

            pub fn printer(&self) -> &$crate::module::Printer {
                self.inner.printer()
            }

            pub fn scanner(&self) -> &$crate::module::Scanner {
                self.inner.scanner()
            }
        }
    };
}
