//! The REPL-mode flag.
//!
//! Consulted by command-token recognition in the lexer and by token-type
//! stringification, where no lexer is in scope.

use parking_lot::{Mutex, MutexGuard, RwLock};

static IN_REPL_MODE: RwLock<bool> = RwLock::new(false);

/// Serializes [`ReplModeGuard`] holders; concurrent tests toggling the flag
/// would otherwise observe each other's setting.
static REPL_MODE_HOLDER: Mutex<()> = Mutex::new(());

pub fn set_repl_mode(truthy: bool) {
    *IN_REPL_MODE.write() = truthy;
}

pub fn in_repl_mode() -> bool {
    *IN_REPL_MODE.read()
}

/// Holds the flag at a value, restoring the previous value when dropped.
/// Only one guard exists at a time.
pub struct ReplModeGuard {
    prev: bool,
    _holder: MutexGuard<'static, ()>,
}

pub fn scoped_repl_mode(truthy: bool) -> ReplModeGuard {
    let holder = REPL_MODE_HOLDER.lock();
    let prev = in_repl_mode();
    set_repl_mode(truthy);
    ReplModeGuard {
        prev,
        _holder: holder,
    }
}

impl Drop for ReplModeGuard {
    fn drop(&mut self) {
        set_repl_mode(self.prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_restores_the_previous_value() {
        assert!(!in_repl_mode());
        {
            let _guard = scoped_repl_mode(true);
            assert!(in_repl_mode());
        }
        assert!(!in_repl_mode());
    }
}
