/// Expect message when conversion from a primitive is gonna work.
pub(crate) const EXPECT_CONVERSION: &str = "Can convert from a primitive";
