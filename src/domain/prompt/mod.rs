mod builder;

pub use builder::{
    GroupedSelection, PHOTOGRAPHY_PREFIX, ParameterFlag, assemble, assemble_flat,
    group_by_position, is_valid, parameter_flags,
};
