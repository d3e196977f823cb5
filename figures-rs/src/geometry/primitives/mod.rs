mod circle;
mod frame_rect;
mod offset_circle;
mod point;
mod rectangle;

#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use frame_rect::FrameRect;
#[doc(inline)]
pub use offset_circle::OffsetCircle;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rectangle::Rectangle;
