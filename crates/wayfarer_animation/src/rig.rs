use uuid::Uuid;
use wayfarer_core::Transform;

#[derive(Debug, Clone)]
pub struct Joint {
    pub name: String,
    pub parent: Option<usize>,
    pub transform: Transform,
}

/// Named joints of an animated actor, in load order.
///
/// The rig is the target a mixer writes its pose into. Its `id` is what a
/// mixer remembers to recognise the rig it was bound to.
#[derive(Debug, Clone)]
pub struct Rig {
    pub id: Uuid,
    pub joints: Vec<Joint>,
}

impl Rig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            joints: Vec::new(),
        }
    }

    /// Appends a joint and returns its index.
    pub fn add_joint(&mut self, name: impl Into<String>, parent: Option<usize>) -> usize {
        self.joints.push(Joint {
            name: name.into(),
            parent,
            transform: Transform::new(),
        });
        self.joints.len() - 1
    }

    #[must_use]
    pub fn find_joint(&self, name: &str) -> Option<usize> {
        self.joints.iter().position(|j| j.name == name)
    }

    #[must_use]
    pub fn joint(&self, index: usize) -> Option<&Joint> {
        self.joints.get(index)
    }

    pub fn joint_mut(&mut self, index: usize) -> Option<&mut Joint> {
        self.joints.get_mut(index)
    }
}

impl Default for Rig {
    fn default() -> Self {
        Self::new()
    }
}
