//! Console logging
//!
//! On wasm32 messages go to the browser console through `web_sys::console`.
//! Native builds (tests, tools) write to stderr instead, since the JS imports
//! are not callable outside a wasm host.

#[doc(hidden)]
pub fn write_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[platforming] {}", message);
    }
}

#[doc(hidden)]
pub fn write_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[platforming] warning: {}", message);
    }
}

/// Log an informational message: `engine_log!("loaded {} bodies", n)`
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {
        $crate::core::log::write_log(&format!($($arg)*))
    };
}

/// Log a warning: `engine_warn!("body {} not found", id)`
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {
        $crate::core::log::write_warn(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_format_arguments() {
        // Native logging goes to stderr; this only checks that the macros expand.
        engine_log!("frame {} done", 3);
        engine_warn!("body {:?} missing", Some(7));
    }
}
