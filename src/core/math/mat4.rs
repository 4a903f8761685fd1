use super::Vec2;

/// Column-major 4x4 matrix, laid out the way GL/WebGL uniforms expect it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    pub cols: [f32; 16],
}

impl Mat4 {
    pub fn identity() -> Self {
        let mut cols = [0.0; 16];
        cols[0] = 1.0;
        cols[5] = 1.0;
        cols[10] = 1.0;
        cols[15] = 1.0;
        Self { cols }
    }

    /// Orthographic projection mapping the box `[left, right] x [bottom, top] x [near, far]`
    /// onto clip space `[-1, 1]^3`.
    ///
    /// Degenerate extents (zero width/height/depth) yield the identity matrix.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let w = right - left;
        let h = top - bottom;
        let d = far - near;
        if w == 0.0 || h == 0.0 || d == 0.0 {
            return Self::identity();
        }

        let mut cols = [0.0; 16];
        cols[0] = 2.0 / w;
        cols[5] = 2.0 / h;
        cols[10] = -2.0 / d;
        cols[12] = -(right + left) / w;
        cols[13] = -(top + bottom) / h;
        cols[14] = -(far + near) / d;
        cols[15] = 1.0;
        Self { cols }
    }

    /// Transform a point on the z = 0 plane (w = 1) and drop z/w.
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let c = &self.cols;
        Vec2::new(
            c[0] * p.x + c[4] * p.y + c[12],
            c[1] * p.x + c[5] * p.y + c[13],
        )
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.cols
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}
