use std::fmt;

/// The three tasks competing for the critical section, in the order the
/// gate admits them: multiply first, then add, then the controller's read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Multiply,
    Add,
    Print,
}

impl Role {
    /// The two roles spawned as worker threads each trial. `Print` is the
    /// controller and never runs on its own thread.
    pub const WORKERS: [Role; 2] = [Role::Add, Role::Multiply];

    /// Phase-counter value this role must observe before it may touch the
    /// shared state. Fixed for the life of the process.
    pub fn trigger(self) -> u8 {
        match self {
            Role::Multiply => 0,
            Role::Add => 1,
            Role::Print => 2,
        }
    }

    /// The role's mutation of the accumulator. `Print` only reads.
    pub fn apply(self, value: i64) -> i64 {
        match self {
            Role::Multiply => value * 2,
            Role::Add => value + 3,
            Role::Print => value,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Multiply => "multiply",
            Role::Add => "add",
            Role::Print => "print",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_table() {
        assert_eq!(Role::Multiply.trigger(), 0);
        assert_eq!(Role::Add.trigger(), 1);
        assert_eq!(Role::Print.trigger(), 2);
    }

    #[test]
    fn test_apply_in_trigger_order_yields_three() {
        let mut value = 0;
        value = Role::Multiply.apply(value);
        value = Role::Add.apply(value);
        assert_eq!(Role::Print.apply(value), 3);
    }

    #[test]
    fn test_workers_exclude_print() {
        assert!(!Role::WORKERS.contains(&Role::Print));
        assert_eq!(Role::WORKERS.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Role::Multiply.to_string(), "multiply");
        assert_eq!(Role::Add.to_string(), "add");
        assert_eq!(Role::Print.to_string(), "print");
    }
}
