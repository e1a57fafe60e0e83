// User-facing strings. The gallery is shown to Japanese-speaking users.

pub const GALLERY_TITLE: &str = "フォトギャラリー";
pub const GALLERY_LOADING: &str = "写真を読み込み中...";
pub const GALLERY_EMPTY: &str = "まだ写真がありません。";
pub const GALLERY_ADD_PHOTO: &str = "新たな写真を追加する";
pub const GALLERY_FETCH_FAILED: &str = "写真の読み込みに失敗しました。";
pub const CONFIRM_DELETE: &str = "本当にこの写真を削除しますか？";
pub const DELETE_FAILED: &str = "写真の削除に失敗しました。";
pub const TAGS_LABEL: &str = "タグ";
pub const NO_TAGS: &str = "タグなし";
pub const EDIT: &str = "編集";
pub const DELETE: &str = "削除";

pub const UPLOAD_HEADING: &str = "新しい写真をアップロード";
pub const UPLOAD_TITLE_LABEL: &str = "タイトル";
pub const UPLOAD_TITLE_PLACEHOLDER: &str = "タイトルを入力してください";
pub const UPLOAD_FILE_LABEL: &str = "ファイルを選択";
pub const UPLOAD_NO_FILE: &str = "ファイルを選択してください。";
pub const UPLOAD_FAILED: &str = "ファイルのアップロードに失敗しました。";
pub const UPLOAD_READ_FAILED: &str = "ファイルを読み込めませんでした。";
pub const UPLOAD_SUBMIT: &str = "アップロード";
pub const UPLOAD_IN_FLIGHT: &str = "アップロード中...";

pub const EDIT_HEADING: &str = "写真の編集";
pub const EDIT_LOADING: &str = "読み込み中...";
pub const EDIT_NOT_FOUND: &str = "写真が見つかりません。";
pub const EDIT_FETCH_FAILED: &str = "写真の取得に失敗しました。";
pub const EDIT_UPDATE_FAILED: &str = "更新に失敗しました。";
pub const EDIT_RETAG_FAILED: &str = "タグの再生成に失敗しました。";
pub const EDIT_TITLE_LABEL: &str = "タイトル";
pub const EDIT_TAGS_LABEL: &str = "タグ";
pub const EDIT_CANCEL: &str = "キャンセル";
pub const EDIT_SAVE: &str = "保存";
pub const EDIT_SAVING: &str = "保存中...";
pub const EDIT_RETAG: &str = "タグを再生成";
pub const EDIT_RETAGGING: &str = "再生成中...";
