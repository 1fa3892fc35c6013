//! Vector primitives on top of [`DrawPixel`]
//!
//! Pure geometry: everything ends up in [`DrawPixel::draw_pixel`], which is
//! responsible for clipping. Only integer arithmetic is used.

use crate::color::Color;
use crate::traits::DrawPixel;

/// Line, circle, rectangle, cross and arrow drawing for any [`DrawPixel`]
pub trait Primitives: DrawPixel {
    /// Bresenham line from (`x0`, `y0`) to (`x1`, `y1`), both ends included
    fn line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> Result<(), Self::Error> {
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let (mut x, mut y) = (i64::from(x0), i64::from(y0));

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            // x and y always lie between the two i32 end points
            self.draw_pixel(x as i32, y as i32, color)?;
            if x == x1 && y == y1 {
                return Ok(());
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Midpoint circle around (`cx`, `cy`)
    ///
    /// When `filled`, four horizontal chords are drawn per step instead of the
    /// eight symmetric points. For larger radii this gives a slightly faceted disc.
    fn circle(
        &mut self,
        cx: i32,
        cy: i32,
        r: i32,
        filled: bool,
        color: Color,
    ) -> Result<(), Self::Error> {
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let mut x = i64::from(r);
        let mut y = 0;
        let mut err = 1 - x;

        while x >= y {
            if filled {
                for (x0, x1, py) in [
                    (cx - x, cx + x, cy + y),
                    (cx - x, cx + x, cy - y),
                    (cx - y, cx + y, cy + x),
                    (cx - y, cx + y, cy - x),
                ] {
                    self.line(saturate(x0), saturate(py), saturate(x1), saturate(py), color)?;
                }
            } else {
                for (px, py) in [
                    (cx + x, cy + y),
                    (cx + y, cy + x),
                    (cx - y, cy + x),
                    (cx - x, cy + y),
                    (cx - x, cy - y),
                    (cx - y, cy - x),
                    (cx + y, cy - x),
                    (cx + x, cy - y),
                ] {
                    self.draw_pixel(saturate(px), saturate(py), color)?;
                }
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
        Ok(())
    }

    /// Rectangle spanning (`x0`, `y0`) to (`x0 + w`, `y0 + h`), corners included
    ///
    /// A filled rectangle covers `(w + 1) * (h + 1)` pixels.
    fn rect(
        &mut self,
        x0: i32,
        y0: i32,
        w: i32,
        h: i32,
        filled: bool,
        color: Color,
    ) -> Result<(), Self::Error> {
        let x1 = saturate(i64::from(x0) + i64::from(w));
        let y1 = saturate(i64::from(y0) + i64::from(h));
        if filled {
            for y in y0.min(y1)..=y0.max(y1) {
                self.line(x0, y, x1, y, color)?;
            }
            return Ok(());
        }
        self.line(x0, y0, x1, y0, color)?;
        self.line(x1, y0, x1, y1, color)?;
        self.line(x1, y1, x0, y1, color)?;
        self.line(x0, y1, x0, y0, color)
    }

    /// Upright cross with arms of `size` pixel around (`cx`, `cy`)
    fn cross(&mut self, cx: i32, cy: i32, size: i32, color: Color) -> Result<(), Self::Error> {
        self.line(cx.saturating_sub(size), cy, cx.saturating_add(size), cy, color)?;
        self.line(cx, cy.saturating_sub(size), cx, cy.saturating_add(size), color)
    }

    /// Line from (`x0`, `y0`) to (`x1`, `y1`) with a head at the end
    ///
    /// The head consists of two strokes reaching back about `stub` pixel. Their
    /// direction is not a true angle: the length of the shaft is taken as the
    /// larger of its two projections and the strokes are spread by half of that
    /// back vector to each side.
    fn arrow(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        stub: i32,
        color: Color,
    ) -> Result<(), Self::Error> {
        self.line(x0, y0, x1, y1, color)?;

        let bx = i64::from(x0) - i64::from(x1);
        let by = i64::from(y0) - i64::from(y1);
        let len = bx.abs().max(by.abs());
        if len == 0 {
            return Ok(());
        }
        let ux = bx * i64::from(stub) / len;
        let uy = by * i64::from(stub) / len;

        let (ex, ey) = (i64::from(x1), i64::from(y1));
        for (hx, hy) in [
            (ex + ux - uy / 2, ey + uy + ux / 2),
            (ex + ux + uy / 2, ey + uy - ux / 2),
        ] {
            self.line(x1, y1, saturate(hx), saturate(hy), color)?;
        }
        Ok(())
    }
}

impl<T: DrawPixel + ?Sized> Primitives for T {}

fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
