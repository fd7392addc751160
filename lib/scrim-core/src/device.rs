//! Viewport and user-agent classification, plus a resize watcher that only
//! reports class changes.

use crate::config::Config;
use crate::host::{HostDocument, SubscriptionId, Viewport};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// Classification by viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Mobile,
    Tablet,
    Desktop,
}

/// Classification by user-agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Mobile,
    Tablet,
    Desktop,
}

static TABLET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ipad|tablet|playbook|silk|kindle").unwrap());
static ANDROID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)android").unwrap());
static MOBILE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)iphone|ipod|windows phone|blackberry|opera mini|mobile").unwrap()
});

pub fn classify_width(width: u32) -> View {
    let config = Config::current();
    if width >= config.desktop_breakpoint {
        View::Desktop
    } else if width >= config.tablet_breakpoint {
        View::Tablet
    } else {
        View::Mobile
    }
}

pub fn classify_user_agent(user_agent: &str) -> Device {
    if TABLET_PATTERN.is_match(user_agent) {
        return Device::Tablet;
    }
    if ANDROID_PATTERN.is_match(user_agent) {
        // Android phones advertise "Mobile"; Android tablets do not.
        return if MOBILE_PATTERN.is_match(user_agent) {
            Device::Mobile
        } else {
            Device::Tablet
        };
    }
    if MOBILE_PATTERN.is_match(user_agent) {
        return Device::Mobile;
    }
    Device::Desktop
}

pub fn view_of(document: &dyn HostDocument) -> View {
    classify_width(document.viewport().width)
}

pub fn device_of(document: &dyn HostDocument) -> Device {
    classify_user_agent(&document.user_agent())
}

/// Resize subscription guard; dropping it unsubscribes.
pub struct ViewWatch {
    document: Arc<dyn HostDocument>,
    subscription: SubscriptionId,
}

/// Invokes `callback` whenever a resize moves the viewport into a different
/// [`View`] class. The initial class is computed at call time and not
/// reported.
pub fn watch_view<F>(document: Arc<dyn HostDocument>, mut callback: F) -> ViewWatch
where
    F: FnMut(View) + Send + 'static,
{
    let mut last = classify_width(document.viewport().width);
    let subscription = document.subscribe_resize(Box::new(move |viewport: Viewport| {
        let view = classify_width(viewport.width);
        if view != last {
            last = view;
            callback(view);
        }
    }));

    ViewWatch {
        document,
        subscription,
    }
}

impl Drop for ViewWatch {
    fn drop(&mut self) {
        self.document.unsubscribe_resize(self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryDocument;
    use std::sync::Mutex;

    const DESKTOP_UA: &str =
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 Safari/537.36";
    const IPHONE_UA: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148 Safari/604.1";
    const IPAD_UA: &str =
        "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X) AppleWebKit/605.1.15 Safari/604.1";
    const ANDROID_PHONE_UA: &str =
        "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile Safari/537.36";
    const ANDROID_TABLET_UA: &str =
        "Mozilla/5.0 (Linux; Android 13; SM-X710) AppleWebKit/537.36 Safari/537.36";

    #[test]
    fn test_classify_width_uses_breakpoints() {
        assert_eq!(classify_width(320), View::Mobile);
        assert_eq!(classify_width(767), View::Mobile);
        assert_eq!(classify_width(768), View::Tablet);
        assert_eq!(classify_width(1199), View::Tablet);
        assert_eq!(classify_width(1200), View::Desktop);
    }

    #[test]
    fn test_classify_user_agent_table() {
        assert_eq!(classify_user_agent(DESKTOP_UA), Device::Desktop);
        assert_eq!(classify_user_agent(IPHONE_UA), Device::Mobile);
        assert_eq!(classify_user_agent(IPAD_UA), Device::Tablet);
        assert_eq!(classify_user_agent(ANDROID_PHONE_UA), Device::Mobile);
        assert_eq!(classify_user_agent(ANDROID_TABLET_UA), Device::Tablet);
        assert_eq!(classify_user_agent(""), Device::Desktop);
    }

    #[test]
    fn test_watch_view_reports_changes_only() {
        let document = Arc::new(MemoryDocument::new(Viewport::new(1440, 900), DESKTOP_UA));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();

        let watch = watch_view(document.clone(), move |view| {
            seen_clone.lock().unwrap().push(view);
        });

        // Still desktop, no report.
        document.resize(Viewport::new(1300, 900));
        // Desktop -> mobile -> tablet.
        document.resize(Viewport::new(375, 667));
        document.resize(Viewport::new(800, 600));
        assert_eq!(*seen.lock().unwrap(), vec![View::Mobile, View::Tablet]);

        drop(watch);
        document.resize(Viewport::new(1440, 900));
        assert_eq!(seen.lock().unwrap().len(), 2);
    }
}
