pub mod p900_requisition_summary;
