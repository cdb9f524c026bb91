//! # Deformkit Contour
//!
//! Editable contours built on the geometry kernel.
//!
//! ## Components
//! - **Side**: bitmask side and corner algebra used to address handles
//! - **TransactionStack**: typed save/restore/pop/apply stack of shape states
//! - **Shapes**: `Quadrilateral`, `RegularPolygon` and `IrregularPolygon`,
//!   gathered in the `Contour` enum and consumed through `ContourShape`
//!
//! ## Architecture
//!
//! ```text
//! Contour (tagged enum)
//!   ├── Quadrilateral     4 polar points + corner index table
//!   ├── RegularPolygon    center, radius, sides, rotation
//!   └── IrregularPolygon  free point list
//! ```
//!
//! Every shape stores its points in a polar frame anchored at a contour-local
//! origin and reports them in the device origin frame. Edits return an
//! [`EditResult`] telling constraints whether a side swap happened.

pub mod shape;
pub mod side;
pub mod transaction;

pub use shape::{
    Contour, ContourShape, CornerIndex, EditResult, IrregularPolygon, IrregularPolygonState,
    Quadrilateral, QuadrilateralState, RegularPolygon, RegularPolygonState, ShapeKind,
};
pub use side::{Side, OPPOSITE_BIT};
pub use transaction::TransactionStack;
