pub(crate) mod grid_dto;
pub(crate) mod storage;
