//! Uncontrolled radio group state.
//!
//! Tracks a highlight cursor and the checked option internally. No handler is
//! attached: checking an option changes nothing outside this struct.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    pub value: u8,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioGroupState {
    options: Vec<RadioOption>,
    /// Highlighted row while the group has focus
    cursor: usize,
    /// Index of the checked option; nothing is checked initially
    checked: Option<usize>,
}

impl RadioGroupState {
    pub fn new(options: Vec<RadioOption>) -> Self {
        Self {
            options,
            cursor: 0,
            checked: None,
        }
    }

    pub fn options(&self) -> &[RadioOption] {
        &self.options
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn checked(&self) -> Option<&RadioOption> {
        self.checked.and_then(|index| self.options.get(index))
    }

    pub fn checked_value(&self) -> Option<u8> {
        self.checked().map(|option| option.value)
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked == Some(index)
    }

    /// Moves the cursor by `delta`, clamped to the option list.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }

    /// Checks the option under the cursor.
    pub fn check_cursor(&mut self) {
        self.check(self.cursor);
    }

    /// Checks `index` and moves the cursor onto it. Out-of-range indices are ignored.
    pub fn check(&mut self, index: usize) {
        if index < self.options.len() {
            self.cursor = index;
            self.checked = Some(index);
        }
    }
}
