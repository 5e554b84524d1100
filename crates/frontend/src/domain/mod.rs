pub mod a001_requisition;
pub mod a002_requisition_item;
pub mod a003_nomenclature;
pub mod a004_unit_of_measure;
