/// The closed set of anatomical regions this viewer knows about.
///
/// Selection controls and the catalog are keyed by the lowercase `name()`
/// strings; the enum is the in-process identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    Frontal,
    Parietal,
    Temporal,
    Occipital,
    Cerebellum,
    Brainstem,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Frontal,
        Region::Parietal,
        Region::Temporal,
        Region::Occipital,
        Region::Cerebellum,
        Region::Brainstem,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::Frontal => "frontal",
            Region::Parietal => "parietal",
            Region::Temporal => "temporal",
            Region::Occipital => "occipital",
            Region::Cerebellum => "cerebellum",
            Region::Brainstem => "brainstem",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Region::ALL.into_iter().find(|r| r.name() == name)
    }

    /// Stable dense index, usable for per-region tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
