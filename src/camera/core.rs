use glam::{Mat4, Quat, Vec3};

/// Perspective camera pose and projection parameters.
///
/// This is the sink the controller writes each frame. Poses use a
/// left-handed frame: +Z forward, +Y up, +X to the right of the screen.
/// The matrices below follow the same handedness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fovy: 60.0,
            aspect: 16.0 / 9.0,
            znear: 0.3,
            zfar: 1000.0,
        }
    }
}

impl Camera {
    /// Direction the camera looks along.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Camera-space up direction in world space.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Left-handed view matrix looking along [`Camera::forward`].
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_lh(self.position, self.forward(), self.up())
    }

    /// Left-handed projection matrix (wgpu/Vulkan `[0, 1]` depth range).
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_lh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_pose_looks_down_z() {
        let camera = Camera::default();
        assert_eq!(camera.forward(), Vec3::Z);
        assert_eq!(camera.up(), Vec3::Y);
    }

    #[test]
    fn point_ahead_lands_in_clip_volume() {
        let camera = Camera {
            position: Vec3::new(0.0, 0.0, -10.0),
            ..Camera::default()
        };
        let clip = camera.build_matrix() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn world_right_is_screen_right() {
        let camera = Camera {
            position: Vec3::new(0.0, 0.0, -10.0),
            ..Camera::default()
        };
        let clip = camera.build_matrix() * Vec3::new(1.0, 1.0, 0.0).extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x > 0.0);
        assert!(ndc.y > 0.0);

        // Turned a quarter to the right, +X is straight ahead
        let turned = Camera {
            position: Vec3::ZERO,
            rotation: Quat::from_rotation_y(90f32.to_radians()),
            ..Camera::default()
        };
        assert!((turned.forward() - Vec3::X).length() < 1e-5);
        let ahead = turned.view_matrix().transform_point3(Vec3::new(5.0, 0.0, 0.0));
        assert!((ahead - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-4);
    }
}
