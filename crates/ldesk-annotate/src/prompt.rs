//! Prompt text sent to the generator

use ldesk_case::CaseRecord;

/// Executive summary prompt: title, category, plaintiff and details
#[must_use]
pub fn summary_prompt(case: &CaseRecord) -> String {
    format!(
        "بصفتك مساعداً قانونياً ذكياً، قم بتلخيص هذه القضية القانونية الجامعية بشكل موجز ودقيق:\n\
         \n\
         العنوان: {title}\n\
         التصنيف: {category}\n\
         المدعي: {plaintiff}\n\
         التفاصيل: {details}\n\
         \n\
         المطلوب: ملخص تنفيذي قانوني في 3 نقاط يوضح جوهر المشكلة والإجراء المطلوب.",
        title = case.title(),
        category = case.category().label(),
        plaintiff = case.plaintiff(),
        details = case.description(),
    )
}

/// Legal memo prompt: category, subject and the requested stance
#[must_use]
pub fn draft_prompt(case: &CaseRecord, stance: &str) -> String {
    format!(
        "اكتب مسودة رأي قانوني (مذكرة) بخصوص القضية التالية:\n\
         نوع القضية: {category}\n\
         الموضوع: {subject}\n\
         وجهة النظر المطلوبة: {stance}\n\
         \n\
         اكتب بصياغة قانونية رسمية باللغة العربية موجهة لرئيس الجامعة أو اللجنة المختصة.",
        category = case.category().label(),
        subject = case.description(),
    )
}
