/// Cooperative close-requested flag owned by the runtime loop.
///
/// Callbacks and the window system request a close; the loop checks the
/// flag at the top of each iteration and stops when it is set. Once
/// requested, the flag stays requested.
#[derive(Debug, Default, Copy, Clone)]
pub struct CloseFlag {
    requested: bool,
}

impl CloseFlag {
    /// Requests a close. Idempotent.
    pub fn request(&mut self) {
        self.requested = true;
    }

    /// True once any close has been requested.
    pub fn is_requested(&self) -> bool {
        self.requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unrequested() {
        assert!(!CloseFlag::default().is_requested());
    }

    #[test]
    fn request_sets_the_flag() {
        let mut flag = CloseFlag::default();
        flag.request();
        assert!(flag.is_requested());
    }

    #[test]
    fn request_is_idempotent() {
        let mut flag = CloseFlag::default();
        flag.request();
        flag.request();
        assert!(flag.is_requested());
        // Repeated checks keep reporting "should close".
        assert!(flag.is_requested());
    }
}
