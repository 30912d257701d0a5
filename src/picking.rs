// picking.rs
// Pointer -> world ray conversion and ray/plane intersection used to place
// newly spawned particles on the ground plane.

use serde::{Deserialize, Serialize};
use ultraviolet::{projection, Mat4, Vec2, Vec3, Vec4};

use crate::config;

/// Perspective camera, right-handed and y-up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        let [x, y, z] = config::CAMERA_EYE;
        Self {
            eye: Vec3::new(x, y, z),
            target: Vec3::zero(),
            up: Vec3::unit_y(),
            fov_y: config::CAMERA_FOV_Y_DEG.to_radians(),
            aspect,
            near: config::CAMERA_NEAR,
            far: config::CAMERA_FAR,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at(self.eye, self.target, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        projection::perspective_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn inverse_view_projection(&self) -> Mat4 {
        (self.projection() * self.view()).inversed()
    }
}

/// Pixel coordinates to normalized device coordinates in [-1, 1], y up.
pub fn screen_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Ray from the camera eye through the given NDC point.
    pub fn from_ndc(ndc: Vec2, camera: &Camera) -> Self {
        let inv_vp = camera.inverse_view_projection();
        let near = unproject(inv_vp, Vec4::new(ndc.x, ndc.y, -1.0, 1.0));
        let far = unproject(inv_vp, Vec4::new(ndc.x, ndc.y, 1.0, 1.0));
        Self::new(camera.eye, far - near)
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// First point where the ray meets `plane`, if any.
    ///
    /// Parallel rays (`direction · normal == 0`) and planes behind the
    /// origin give `None`. Nearly parallel rays still hit, however far away.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let denom = plane.normal.dot(self.direction);
        if denom == 0.0 {
            // Origin already on the plane: that is the hit.
            if plane.distance_to(self.origin) == 0.0 {
                return Some(self.origin);
            }
            return None;
        }
        let t = -(self.origin.dot(plane.normal) + plane.constant) / denom;
        if t >= 0.0 {
            Some(self.at(t))
        } else {
            None
        }
    }
}

fn unproject(inv_vp: Mat4, clip: Vec4) -> Vec3 {
    let p = inv_vp * clip;
    p.truncated() / p.w
}

/// Plane `normal · p + constant = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    pub fn new(normal: Vec3, constant: f32) -> Self {
        Self {
            normal: normal.normalized(),
            constant,
        }
    }

    /// Horizontal plane y = 0 through the origin.
    pub fn ground() -> Self {
        Self::new(Vec3::unit_y(), 0.0)
    }

    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }
}
