pub(crate) mod city_map;
pub(crate) mod options;
