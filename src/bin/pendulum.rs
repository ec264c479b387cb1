use bevy::prelude::*;
use spring_cloth::config::{PENDULUM_HZ, PENDULUM_WINDOW};
use spring_cloth::physics::render::BACKGROUND;
use spring_cloth::PendulumPlugin;
use tracing::error;

fn main() {
    let mut app = App::new();
    app.insert_resource(ClearColor(BACKGROUND))
        .insert_resource(Time::<Fixed>::from_hz(PENDULUM_HZ))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "spring pendulum".into(),
                resolution: PENDULUM_WINDOW.into(),
                ..default()
            }),
            ..default()
        }));

    let pendulum = PendulumPlugin::default();
    if let Err(e) = pendulum.config.validate() {
        error!("invalid pendulum config: {e}");
        return;
    }

    app.add_plugins(pendulum).run();
}
