// ==========================================
// 配置管理器集成测试
// ==========================================
// 测试范围:
// 1. 配置文件加载/缺失回退默认
// 2. 配置保存与重载
// 3. 配置驱动分类行为 (挂起标记/追加别名)
// ==========================================

mod helpers;

use helpers::test_data_builder::{JobPlanBuilder, StepBuilder};

use corrugated_ops::config::{ClassifierConfig, ClassifierConfigReader, ConfigManager};
use corrugated_ops::domain::types::{JobStatus, StepStatus};
use corrugated_ops::engine::{JobClassifyEngine, StepTallyEngine};

#[test]
fn test_缺失配置文件回退默认() {
    let dir = tempfile::tempdir().expect("无法创建临时目录");
    let path = dir.path().join("classifier.json");

    let manager = ConfigManager::from_file(&path).expect("加载失败");
    let snapshot = manager.snapshot().unwrap();
    assert_eq!(snapshot.hold_remark_markers, vec!["hold".to_string()]);
    assert_eq!(snapshot.major_hold_markers, vec!["major".to_string()]);
}

#[test]
fn test_保存后重载一致() {
    let dir = tempfile::tempdir().expect("无法创建临时目录");
    let path = dir.path().join("classifier.json");

    let manager = ConfigManager::new();
    let mut config = ClassifierConfig::default();
    config.major_hold_markers.push("critical".to_string());
    config
        .step_alias_overrides
        .insert("Die Cutting".to_string(), "Punching".to_string());
    manager.overwrite(config).unwrap();
    manager.save_to_file(&path).expect("保存失败");

    let reloaded = ConfigManager::from_file(&path).expect("重载失败");
    let snapshot = reloaded.snapshot().unwrap();
    assert!(snapshot.major_hold_markers.contains(&"critical".to_string()));
    assert_eq!(
        snapshot.step_alias_overrides.get("Die Cutting"),
        Some(&"Punching".to_string())
    );
}

#[test]
fn test_部分键配置文件补默认() {
    let dir = tempfile::tempdir().expect("无法创建临时目录");
    let path = dir.path().join("classifier.json");
    std::fs::write(&path, r#"{"holdRemarkMarkers": ["挂起", "hold"]}"#).unwrap();

    let manager = ConfigManager::from_file(&path).expect("加载失败");
    let snapshot = manager.snapshot().unwrap();
    assert_eq!(snapshot.hold_remark_markers.len(), 2);
    // 未给出的键使用默认
    assert_eq!(snapshot.major_hold_markers, vec!["major".to_string()]);
}

#[test]
fn test_非法配置文件报错() {
    let dir = tempfile::tempdir().expect("无法创建临时目录");
    let path = dir.path().join("classifier.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(ConfigManager::from_file(&path).is_err());
}

// ==========================================
// 配置驱动分类行为
// ==========================================

#[tokio::test]
async fn test_自定义挂起标记驱动归一() {
    let manager = ConfigManager::new();
    let mut config = ClassifierConfig::default();
    config.hold_remark_markers.push("暂停".to_string());
    config.major_hold_markers.push("重大".to_string());
    manager.overwrite(config).unwrap();

    let engine = JobClassifyEngine::new();
    let job = JobPlanBuilder::new("NRC-ZH")
        .step(StepBuilder::new("PrintingDetails", StepStatus::Start).remarks("重大客诉, 暂停生产"))
        .build();

    let (status, _) = engine.classify(&job, &manager).await.unwrap();
    assert_eq!(status, JobStatus::MajorHold);
}

#[tokio::test]
async fn test_追加别名驱动聚合() {
    let manager = ConfigManager::new();
    let mut config = ClassifierConfig::default();
    config
        .step_alias_overrides
        .insert("QC".to_string(), "QualityDept".to_string());
    manager.overwrite(config).unwrap();

    let engine = StepTallyEngine::new();
    let jobs = vec![JobPlanBuilder::new("NRC-QC")
        .step(StepBuilder::new("QC", StepStatus::Stop))
        .build()];

    let report = engine.build(&jobs, &manager).await.unwrap();
    assert_eq!(report.steps.get("QualityDept").unwrap().completed, 1);
    assert!(!report.steps.contains_key("QC"));
}

#[tokio::test]
async fn test_reader_trait对象安全() {
    // DashboardApi 以 trait 对象持有配置读取器
    let manager: Box<dyn ClassifierConfigReader> = Box::new(ConfigManager::new());
    let markers = manager.get_hold_remark_markers().await.unwrap();
    assert_eq!(markers, vec!["hold".to_string()]);
}
