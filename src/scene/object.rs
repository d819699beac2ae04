use crate::animation::AnimationPlayer;
use crate::scene::component::Component;
use crate::scene::light::Light;
use crate::utils::FrameClock;

/// A named object in the scene.
///
/// The engine's built-in components are typed fields; anything else goes
/// into the boxed component list. Children are owned and updated after their
/// parent.
#[derive(Default)]
pub struct SceneObject {
    name: String,
    pub light: Option<Light>,
    pub animation: Option<AnimationPlayer>,
    components: Vec<Box<dyn Component>>,
    children: Vec<SceneObject>,
}

impl SceneObject {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_light(mut self, light: Light) -> Self {
        self.light = Some(light);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationPlayer) -> Self {
        self.animation = Some(animation);
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_component(&mut self, component: impl Component + 'static) {
        self.components.push(Box::new(component));
    }

    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn add_child(&mut self, child: SceneObject) {
        self.children.push(child);
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[SceneObject] {
        &self.children
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    #[must_use]
    pub fn find_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(name))
    }

    /// Updates this object's components, then its children.
    pub fn update(&mut self, clock: &FrameClock) {
        if let Some(light) = &mut self.light {
            light.update(clock);
        }
        if let Some(animation) = &mut self.animation {
            Component::update(animation, clock);
        }
        for component in &mut self.components {
            component.update(clock);
        }
        for child in &mut self.children {
            child.update(clock);
        }
    }

    /// Shuts down children first, then this object's components.
    pub fn shutdown(&mut self) {
        for child in &mut self.children {
            child.shutdown();
        }
        for component in &mut self.components {
            component.shutdown();
        }
        if let Some(animation) = &mut self.animation {
            animation.shutdown();
        }
        if let Some(light) = &mut self.light {
            light.shutdown();
        }
    }
}

impl std::fmt::Debug for SceneObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneObject")
            .field("name", &self.name)
            .field("light", &self.light)
            .field("animation", &self.animation.is_some())
            .field("components", &self.components.len())
            .field("children", &self.children)
            .finish()
    }
}
