use leptos::logging::log;
use std::panic;

/// Sets up a panic hook that adds context for Leptos owner disposal
/// panics on top of the standard console reporting.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        // Extract panic message
        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        // Owner disposal means a callback outlived its component: usually
        // a banner timer or a fetch completing after a re-render.
        if message.contains("OwnerDisposed") {
            log!("[PANIC] Leptos owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. A status-banner timer fired after its form was unmounted");
            log!("[PANIC] 2. A snapshot fetch resolved after the place selection changed");

            let js_code = r#"
                console.log('[PANIC] map containers still mounted:',
                    document.querySelectorAll('.map').length);
            "#;
            let _ = js_sys::eval(js_code);
        }
    }));
}

/// Call from the hydrate entry point before mounting.
pub fn init() {
    set_custom_panic_hook();
}
