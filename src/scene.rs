use bevy::{app::AppExit, math::EulerRot, prelude::*};
use bevy_fly_camera::FlyCamera;

use crate::fog::{fog_settings, FogMode, FogParams};

pub const CLEAR_COLOR: Color = Color::rgb(0.0, 0.5, 0.9);

/// Model-view matrix of the demo's starting viewpoint (column-major):
/// tilted about 25 degrees about X, terrain 45 units in front of the eye.
pub fn initial_view() -> Mat4 {
    Mat4::from_cols_array(&[
        1.0, 0.0, 0.0, 0.0, //
        0.0, 0.906, 0.422, 0.0, //
        0.0, -0.422, 0.906, 0.0, //
        0.0, 1.13, -45.0, 1.0,
    ])
}

/// Camera transform is the inverse of the model-view matrix.
pub fn initial_camera_transform() -> Transform {
    let mut transform = Transform::from_matrix(initial_view().inverse());
    // The rounded matrix entries leave a slight scale behind
    transform.scale = Vec3::ONE;
    transform
}

/// 52 degree vertical field of view, clipped to 1..100 units.
pub fn initial_projection() -> PerspectiveProjection {
    PerspectiveProjection {
        fov: 52f32.to_radians(),
        near: 1.,
        far: 100.,
        ..default()
    }
}

pub fn setup_camera(mut commands: Commands, mode: Res<FogMode>, params: Res<FogParams>) {
    let transform = initial_camera_transform();
    let (yaw, pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);

    commands
        .spawn(Camera3dBundle {
            transform,
            projection: Projection::Perspective(initial_projection()),
            ..default()
        })
        .insert(fog_settings(*mode, &params))
        .insert(FlyCamera {
            // FlyCamera pitches about -X, so looking down is a positive pitch
            pitch: -pitch.to_degrees(),
            yaw: yaw.to_degrees(),
            // Space is the fog key
            key_up: KeyCode::E,
            key_down: KeyCode::Q,
            ..default()
        });
}

pub fn setup_lights(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.2,
    });

    let towards_light = Vec3::new(0.0, 0.4, 1.0);
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 10_000.,
            shadows_enabled: false,
            ..default()
        },
        transform: Transform::IDENTITY.looking_at(-towards_light, Vec3::Y),
        ..default()
    });
}

pub fn exit_on_escape(keys: Res<Input<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, exiting");
        exit.send(AppExit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::event::Events;

    #[test]
    fn camera_starts_above_and_behind() {
        let transform = initial_camera_transform();
        let (_, pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);

        assert!((pitch.to_degrees() + 25.).abs() < 0.5);
        assert!(transform.translation.y > 15.);
        assert!(transform.translation.z > 40.);
        assert_eq!(transform.scale, Vec3::ONE);

        let forward = transform.forward();
        assert!(forward.y < 0. && forward.z < 0.);
    }

    #[test]
    fn projection_matches_fixed_view() {
        // Column-major projection of the fixed 1024x768 view
        let expected = [
            1.53, 0., 0., 0., //
            0., 2.05, 0., 0., //
            0., 0., -1.02, -1., //
            0., 0., -2.02, 0.,
        ];

        let projection = initial_projection();
        let matrix = Mat4::perspective_rh_gl(
            projection.fov,
            1024. / 768.,
            projection.near,
            projection.far,
        );

        for (actual, expected) in matrix.to_cols_array().iter().zip(expected) {
            assert!((actual - expected).abs() < 0.01, "{actual} != {expected}");
        }
    }

    #[test]
    fn escape_requests_exit() {
        let mut app = App::new();
        app.init_resource::<Input<KeyCode>>()
            .add_event::<AppExit>()
            .add_system(exit_on_escape);

        app.update();
        assert!(app.world.resource::<Events<AppExit>>().is_empty());

        app.world
            .resource_mut::<Input<KeyCode>>()
            .press(KeyCode::Escape);
        app.update();
        assert!(!app.world.resource::<Events<AppExit>>().is_empty());
    }
}
