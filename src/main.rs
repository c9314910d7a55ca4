use simple_fog::{
    config::TerrainConfig,
    fog::{toggle_fog_mode, window_title, FogMode, FogParams},
    scene::{exit_on_escape, setup_camera, setup_lights, CLEAR_COLOR},
    terrain::{load_terrain_geometry, spawn_terrain_meshes},
};

use bevy::{
    prelude::*,
    render::render_resource::{AddressMode, SamplerDescriptor},
};
use bevy_fly_camera::FlyCameraPlugin;

fn main() {
    let config = TerrainConfig::from_env();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: window_title(FogMode::default()),
                        resolution: (1024., 768.).into(),
                        ..default()
                    }),
                    ..default()
                })
                // Texture coordinates tile past 1.0
                .set(ImagePlugin {
                    default_sampler: SamplerDescriptor {
                        address_mode_u: AddressMode::Repeat,
                        address_mode_v: AddressMode::Repeat,
                        ..default()
                    },
                }),
        )
        .add_plugin(FlyCameraPlugin)
        .insert_resource(ClearColor(CLEAR_COLOR))
        .insert_resource(config)
        .init_resource::<FogMode>()
        .init_resource::<FogParams>()
        .add_startup_systems(
            (
                load_terrain_geometry,
                apply_system_buffers,
                spawn_terrain_meshes,
            )
                .chain(),
        )
        .add_startup_system(setup_camera)
        .add_startup_system(setup_lights)
        .add_system(toggle_fog_mode)
        .add_system(exit_on_escape)
        .run();
}
