//! Category-targeted commands for scene nodes.
//!
//! Systems push a [`SceneCommand`] describing *what* to do and *which* category
//! of node it applies to; [`dispatch_commands_system`] later walks the scene and
//! runs the action on every node whose category intersects the command's.
//! Nodes can also push commands while they update, since the queue is a plain
//! resource.
//!
//! [`dispatch_commands_system`]: crate::systems::commands::dispatch_commands_system

use std::collections::VecDeque;

use bevy_ecs::prelude::{Entity, Resource, World};

use crate::components::category::Category;

/// Action run against one matching node: `(world, node, dt)`.
pub type CommandAction = Box<dyn Fn(&mut World, Entity, f32) + Send + Sync>;

pub struct SceneCommand {
    pub category: Category,
    pub action: CommandAction,
}

impl SceneCommand {
    pub fn new(
        category: Category,
        action: impl Fn(&mut World, Entity, f32) + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            action: Box::new(action),
        }
    }
}

impl std::fmt::Debug for SceneCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneCommand")
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// FIFO of pending [`SceneCommand`]s.
#[derive(Resource, Debug, Default)]
pub struct CommandQueue {
    queue: VecDeque<SceneCommand>,
}

impl CommandQueue {
    pub fn push(&mut self, command: SceneCommand) {
        self.queue.push_back(command);
    }

    pub fn pop(&mut self) -> Option<SceneCommand> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_fifo() {
        let mut q = CommandQueue::default();
        q.push(SceneCommand::new(Category::ENEMY_AIRCRAFT, |_, _, _| {}));
        q.push(SceneCommand::new(Category::ALLIED_PROJECTILE, |_, _, _| {}));
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop().map(|c| c.category), Some(Category::ENEMY_AIRCRAFT));
        assert_eq!(q.pop().map(|c| c.category), Some(Category::ALLIED_PROJECTILE));
        assert!(q.is_empty());
        assert!(q.pop().is_none());
    }
}
