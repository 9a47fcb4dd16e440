//! Alternate spellings of the predicates, for Rust callers.
//!
//! Each alias is the same function as its canonical predicate, re-exported
//! under a snake_case form of the alias. [`crate::check`] accepts the
//! camelCase spellings (`posInt`, `ary.empty`, ...).

// General
pub use crate::predicates::{
    defined as def, equal as eq, instance_of as inst_of, instance_of as instanceof,
    is_type as a, null_or_undef as is_null_or_undefined, null_or_undef as null_or_undefined,
};

// Categories
pub use crate::predicates::{
    arguments as args, array as ary, array as arry, array as is_array, boolean as bool,
    boolean as is_boolean, date as is_date, error as err, error as is_error, function as func,
    function as is_function, number as is_number, number as num, object as is_plain_object,
    object as obj, regexp as is_reg_exp, regexp as reg_exp, string as is_string, string as str,
    undefined as udef, undefined as undef,
};

// Sizes and emptiness
pub use crate::predicates::{
    array_empty as args_empty, array_empty as arguments_empty, array_empty as ary_empty,
    array_empty as arry_empty, array_like as ary_like, array_like as arraylike,
    array_like as arry_like, array_like as is_array_like, non_empty_array as non_empty_ary,
    non_empty_array as non_empty_arry, non_empty_object as non_empty_obj,
    non_empty_string as non_empty_str,
};

// Instances
pub use crate::predicates::{
    object_instance_of as obj_inst_of, object_instance_of as objectinstanceof,
};

// Numbers
pub use crate::predicates::{
    decimal as dec_num, decimal as dec_numer, divisible_by as divis_by, int as integer,
    maximum as max, minimum as min, nan as not_a_num, nan as not_a_number,
    negative_int as neg_int, negative_int as negative_integer, negative_number as neg_num,
    negative_number as negative_num, positive_int as pos_int, positive_int as positive_integer,
    positive_number as pos_num, positive_number as positive_num,
};

// Relations
pub use crate::predicates::{
    gt as greater_than, le as less_than_or_eq, le as less_than_or_equal, lt as less_than,
    within as with_in,
};
