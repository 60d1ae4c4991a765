pub mod storage_panel;
