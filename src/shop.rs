use crate::upgrades::UpgradeKind;

/// Menu state of the upgrade shop. Drawing it is the frontend's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shop {
    options: Vec<UpgradeKind>,
    selected: usize,
}

impl Shop {
    pub fn new() -> Self {
        Shop { options: UpgradeKind::ALL.to_vec(), selected: 0 }
    }

    pub fn selected(&self) -> UpgradeKind {
        self.options[self.selected]
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }
}

impl Default for Shop {
    fn default() -> Self {
        Shop::new()
    }
}
