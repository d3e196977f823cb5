use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::FrameRect;
use log::error;

//Various checks to verify correctness of the collection operations
//Used in debug_assertion!() blocks

pub fn frame_encloses_all<S: Shape>(frame: &FrameRect, shapes: &[S]) -> bool {
    for (i, shape) in shapes.iter().enumerate() {
        let shape_frame = shape.frame();
        if !frame.almost_encloses(&shape_frame) {
            error!("frame {frame:?} does not enclose frame {shape_frame:?} of shape {i}");
            return false;
        }
    }
    true
}
