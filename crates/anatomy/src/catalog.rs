use foundation::color::Rgb;
use foundation::math::Vec3;

use crate::bounds::RegionBounds;
use crate::region::Region;

/// Immutable definition of one anatomical region.
///
/// Defined once at startup (built-in table or a loaded catalog document) and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDef {
    pub region: Region,
    /// Bilingual (English + Chinese) text for the description panel.
    pub description: String,
    pub highlight_color: Rgb,
    pub bounds: RegionBounds,
    /// Fixed label anchor in model space.
    pub label_anchor: Vec3,
    pub label_text: String,
}

/// The full region table, one definition per `Region`, stored in `Region::ALL`
/// order so `Region::index()` addresses it directly.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionCatalog {
    defs: Vec<RegionDef>,
}

impl RegionCatalog {
    /// Builds a catalog from an arbitrary definition list.
    ///
    /// Returns `None` unless every region appears exactly once; order is
    /// normalized to `Region::ALL`.
    pub fn from_defs(defs: Vec<RegionDef>) -> Option<Self> {
        if defs.len() != Region::ALL.len() {
            return None;
        }
        let mut slots: Vec<Option<RegionDef>> = vec![None; Region::ALL.len()];
        for def in defs {
            let slot = &mut slots[def.region.index()];
            if slot.is_some() {
                return None;
            }
            *slot = Some(def);
        }
        let defs = slots.into_iter().collect::<Option<Vec<_>>>()?;
        Some(Self { defs })
    }

    pub fn get(&self, region: Region) -> &RegionDef {
        &self.defs[region.index()]
    }

    pub fn by_name(&self, name: &str) -> Option<&RegionDef> {
        Region::from_name(name).map(|r| self.get(r))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionDef> {
        self.defs.iter()
    }

    /// The built-in region table.
    pub fn builtin() -> Self {
        let defs = vec![
            RegionDef {
                region: Region::Frontal,
                description: "The frontal lobe is involved in executive functions, including \
                              planning, decision-making, and motor control. It contains the \
                              primary motor cortex and Broca's area for speech production.\n\n\
                              额叶参与执行功能，包括计划、决策和运动控制。它包含初级运动皮层和\
                              布洛卡区（负责语言产生）。"
                    .to_string(),
                highlight_color: Rgb::from_hex(0x4caf50),
                bounds: RegionBounds {
                    min_x: Some(-1.0),
                    max_x: Some(1.0),
                    min_y: Some(-0.2),
                    max_y: Some(2.0),
                    min_z: Some(0.5),
                    max_z: Some(2.0),
                    abs_x: None,
                },
                label_anchor: Vec3::new(0.0, 0.2, 1.0),
                label_text: "Frontal | 额叶".to_string(),
            },
            RegionDef {
                region: Region::Parietal,
                description: "The parietal lobe processes sensory information and is involved \
                              in spatial awareness, navigation, and attention. It contains the \
                              primary somatosensory cortex.\n\n\
                              顶叶处理感觉信息，参与空间感知、导航和注意力。它包含初级躯体感觉\
                              皮层。"
                    .to_string(),
                highlight_color: Rgb::from_hex(0x2196f3),
                bounds: RegionBounds {
                    min_x: Some(-1.0),
                    max_x: Some(1.0),
                    min_y: Some(0.3),
                    max_y: Some(2.0),
                    min_z: Some(-0.3),
                    max_z: Some(0.5),
                    abs_x: None,
                },
                label_anchor: Vec3::new(0.0, 1.0, 0.0),
                label_text: "Parietal | 顶叶".to_string(),
            },
            RegionDef {
                region: Region::Temporal,
                description: "The temporal lobe processes auditory information and is crucial \
                              for memory formation. It contains the primary auditory cortex and \
                              Wernicke's area for language comprehension.\n\n\
                              颞叶处理听觉信息，对记忆形成至关重要。它包含初级听觉皮层和韦尼克\
                              区（负责语言理解）。"
                    .to_string(),
                highlight_color: Rgb::from_hex(0xf44336),
                bounds: RegionBounds {
                    min_y: Some(-0.5),
                    max_y: Some(0.3),
                    min_z: Some(-0.3),
                    max_z: Some(0.5),
                    abs_x: Some(0.8),
                    ..RegionBounds::default()
                },
                label_anchor: Vec3::new(1.2, -0.1, 0.3),
                label_text: "Temporal | 颞叶".to_string(),
            },
            RegionDef {
                region: Region::Occipital,
                description: "The occipital lobe processes visual information. It contains the \
                              primary visual cortex and is essential for interpreting what we \
                              see.\n\n\
                              枕叶处理视觉信息。它包含初级视觉皮层，对解释我们所看到的内容至关\
                              重要。"
                    .to_string(),
                highlight_color: Rgb::from_hex(0xffc107),
                bounds: RegionBounds {
                    min_x: Some(-0.8),
                    max_x: Some(0.8),
                    min_y: Some(0.0),
                    max_y: Some(2.0),
                    max_z: Some(-0.3),
                    ..RegionBounds::default()
                },
                label_anchor: Vec3::new(0.0, 0.2, -0.8),
                label_text: "Occipital | 枕叶".to_string(),
            },
            RegionDef {
                region: Region::Cerebellum,
                description: "The cerebellum coordinates movement and balance, and is involved \
                              in motor learning and certain cognitive functions.\n\n\
                              小脑协调运动和平衡，参与运动学习和某些认知功能。"
                    .to_string(),
                highlight_color: Rgb::from_hex(0x9c27b0),
                bounds: RegionBounds {
                    min_x: Some(-0.8),
                    max_x: Some(0.8),
                    min_y: Some(-0.8),
                    max_y: Some(-0.3),
                    min_z: Some(-2.0),
                    max_z: Some(-0.2),
                    abs_x: None,
                },
                label_anchor: Vec3::new(0.6, -0.5, -0.6),
                label_text: "Cerebellum | 小脑".to_string(),
            },
            RegionDef {
                region: Region::Brainstem,
                description: "The brainstem controls basic life functions like breathing, heart \
                              rate, and consciousness. It connects the brain to the spinal \
                              cord.\n\n\
                              脑干控制基本生命功能，如呼吸、心率和意识。它连接大脑和脊髓。"
                    .to_string(),
                highlight_color: Rgb::from_hex(0xff9800),
                bounds: RegionBounds {
                    min_x: Some(-0.3),
                    max_x: Some(0.3),
                    min_y: Some(-2.0),
                    max_y: Some(-0.8),
                    min_z: Some(-0.5),
                    max_z: Some(0.5),
                    abs_x: None,
                },
                label_anchor: Vec3::new(0.0, -0.9, 0.0),
                label_text: "Brainstem | 脑干".to_string(),
            },
        ];

        Self::from_defs(defs).unwrap_or_else(|| unreachable!("builtin table covers every region"))
    }
}
