use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;
use vc_app::{AppDeps, SelectionError, UseCases};
use vc_core::options::OptLevel;
use vc_core::ports::{CompilerProbePort, EditorProbePort, SetupInfo};
use vc_core::{CompilerDescriptor, ConfigStore, ProfileKind, SetupId, VerifyResult};

mock! {
    pub Editor {}

    #[async_trait]
    impl EditorProbePort for Editor {
        async fn scan(&self) -> anyhow::Result<Option<String>>;
        async fn verify(&self, path: &str) -> VerifyResult;
    }
}

mock! {
    pub Compiler {}

    #[async_trait]
    impl CompilerProbePort for Compiler {
        async fn setups(&self) -> anyhow::Result<Vec<SetupInfo>>;
        async fn scan(&self, setup: SetupId) -> anyhow::Result<Vec<CompilerDescriptor>>;
        async fn verify(&self, setup: SetupId, path: &str) -> VerifyResult<CompilerDescriptor>;
    }
}

fn gcc12() -> CompilerDescriptor {
    CompilerDescriptor {
        setup: "gcc".to_string(),
        path: "/usr/bin/g++".to_string(),
        version: "12.2".to_string(),
        package_string: "Debian 12.2.0-14".to_string(),
        version_text: "g++ (Debian 12.2.0-14) 12.2.0".to_string(),
    }
}

fn build_deps(editor: MockEditor, compiler: MockCompiler) -> AppDeps {
    AppDeps {
        store: Arc::new(ConfigStore::new()),
        editor_probe: Arc::new(editor),
        compiler_probe: Arc::new(compiler),
        code_page: None,
    }
}

#[tokio::test]
async fn wizard_flow_fills_every_slot_and_finalizes() {
    let mut editor = MockEditor::new();
    editor
        .expect_scan()
        .times(1)
        .returning(|| Ok(Some("/usr/bin/code".to_string())));

    let mut compiler = MockCompiler::new();
    compiler
        .expect_scan()
        .with(eq(SetupId::Gcc))
        .times(1)
        .returning(|_| Ok(vec![gcc12()]));

    let deps = build_deps(editor, compiler);
    let usecases = UseCases::new(&deps);
    let workspace = tempfile::tempdir().unwrap();

    let done_events = Arc::new(Mutex::new(Vec::new()));
    let sink = done_events.clone();
    usecases.store().done().subscribe(move |value: Option<&bool>| {
        sink.lock().unwrap().push(value.copied());
    });

    usecases.detect_editor().execute().await.unwrap();

    let found = usecases.scan_compilers().execute(SetupId::Gcc).await.unwrap();
    usecases.select_compiler().execute(found[0].clone());

    let workspace_path = workspace.path().to_str().unwrap();
    assert!(usecases.select_workspace().execute(workspace_path).is_ok());

    usecases.apply_profile().execute(ProfileKind::Newbie, ["-lm"]);
    usecases
        .update_options()
        .execute(|o| o.active_opt_level = OptLevel::O2)
        .unwrap();

    let enabled = usecases.scan_enabled_options().execute().unwrap();
    assert!(enabled.use_gnu_enabled);
    assert!(!enabled.acp_output_enabled);

    let selection = usecases.collect_selection().execute().unwrap();
    usecases.mark_complete().execute();

    assert_eq!(selection.editor, "/usr/bin/code");
    assert_eq!(selection.compiler, gcc12());
    assert_eq!(selection.workspace, workspace_path);
    assert_eq!(selection.options.base.active_standard.as_deref(), Some("c++23"));
    assert_eq!(
        selection.options.args,
        vec![
            "-Wall",
            "-Wextra",
            "-pedantic",
            "-Werror",
            "-O2",
            "-fexec-charset=GBK",
            "-lm"
        ]
    );
    assert_eq!(*done_events.lock().unwrap(), vec![None, Some(true)]);
}

#[tokio::test]
async fn rejected_editor_path_is_not_stored() {
    let mut editor = MockEditor::new();
    editor
        .expect_verify()
        .returning(|path| VerifyResult::err(format!("{path} is not an editor")));

    let deps = build_deps(editor, MockCompiler::new());
    let usecases = UseCases::new(&deps);

    let result = usecases.select_editor().execute("/bin/ls").await;

    assert_eq!(result.message(), Some("/bin/ls is not an editor"));
    assert_eq!(deps.store.editor().get(), None);
}

#[tokio::test]
async fn verify_compiler_does_not_select() {
    let mut compiler = MockCompiler::new();
    compiler
        .expect_verify()
        .returning(|_, _| VerifyResult::ok(gcc12()));

    let deps = build_deps(MockEditor::new(), compiler);
    let usecases = UseCases::new(&deps);

    let result = usecases
        .verify_compiler()
        .execute(SetupId::Gcc, "/usr/bin/g++")
        .await;

    assert_eq!(result.into_value(), Some(gcc12()));
    assert_eq!(deps.store.compiler().get(), None);
}

#[tokio::test]
async fn scan_error_carries_context() {
    let mut compiler = MockCompiler::new();
    compiler
        .expect_scan()
        .returning(|_| Err(anyhow::anyhow!("permission denied")));

    let deps = build_deps(MockEditor::new(), compiler);
    let err = UseCases::new(&deps)
        .scan_compilers()
        .execute(SetupId::Llvm)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "scan compilers for llvm failed");
}

#[test]
fn collect_selection_without_options_fails() {
    let deps = build_deps(MockEditor::new(), MockCompiler::new());
    deps.store.editor().set(Some("/usr/bin/code".to_string()));
    deps.store.compiler().set(Some(gcc12()));
    deps.store.workspace().set(Some("/tmp/ws".to_string()));

    assert_eq!(
        UseCases::new(&deps).collect_selection().execute(),
        Err(SelectionError::MissingSlot("options"))
    );
}
