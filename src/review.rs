//! 修正候補の確認と採用
//!
//! 候補を1件ずつ判断し、採用したらフォームを評価し直して次の候補を探す。
//! 同じフィールドについて聞くのは1回だけ。

use crate::error::{Result, VehicleError};
use dialoguer::Confirm;
use smart_vehicle_common::{
    AcceptancePolicy, Corrections, FormEvaluation, Issue, IssueField, ValidationSession,
    VehicleForm,
};

/// 確認結果
pub struct Reviewed {
    pub form: VehicleForm,
    pub evaluation: FormEvaluation,
    pub corrections: Corrections,
}

/// 修正候補を順に判断する
///
/// `decide` がtrueを返した候補を採用する。
pub fn review_issues<F>(
    session: &ValidationSession,
    policy: &AcceptancePolicy,
    form: &VehicleForm,
    mut decide: F,
) -> Result<Reviewed>
where
    F: FnMut(&Issue) -> Result<bool>,
{
    let mut form = form.clone();
    let mut corrections = Corrections::default();
    let mut evaluation = session.evaluate_form(&form);
    let mut handled: Vec<IssueField> = Vec::new();

    while let Some(issue) = policy
        .issues(&evaluation)
        .into_iter()
        .find(|i| !handled.contains(&i.field))
    {
        handled.push(issue.field);

        if decide(&issue)? {
            tracing::debug!(field = ?issue.field, suggestion = %issue.suggestion, "suggestion accepted");
            AcceptancePolicy::accept(&mut form, &mut corrections, &issue);
            evaluation = session.evaluate_form(&form);
        }
    }

    Ok(Reviewed {
        form,
        evaluation,
        corrections,
    })
}

/// すべて採用
pub fn accept_all(
    session: &ValidationSession,
    policy: &AcceptancePolicy,
    form: &VehicleForm,
) -> Result<Reviewed> {
    review_issues(session, policy, form, |_| Ok(true))
}

/// 1件ずつ確認
pub fn review_interactive(
    session: &ValidationSession,
    policy: &AcceptancePolicy,
    form: &VehicleForm,
) -> Result<Reviewed> {
    review_issues(session, policy, form, |issue| {
        Confirm::new()
            .with_prompt(format!("{}: 「{}」を採用しますか?", issue.field, issue.suggestion))
            .default(true)
            .interact()
            .map_err(|e| VehicleError::Prompt(e.to_string()))
    })
}
