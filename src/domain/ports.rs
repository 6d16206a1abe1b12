/// 目前年份的來源，測試時可注入固定年份
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_year(&self) -> i64 {
        (**self).current_year()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn current_year(&self) -> i64 {
        (**self).current_year()
    }
}
